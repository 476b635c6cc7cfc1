pub mod email_controller;
