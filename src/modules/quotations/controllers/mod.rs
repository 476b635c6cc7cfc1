pub mod quotation_controller;
