pub mod motor_controller;
