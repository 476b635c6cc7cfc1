pub mod motor;

pub use motor::{parse_winding_data, Motor, MotorRequest, MotorType, WindingCoil, WindingSection};
