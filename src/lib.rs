pub mod bolt;
pub mod gradient;
pub mod icon_gen;
