pub mod motor_repository;

pub use motor_repository::MotorRepository;
