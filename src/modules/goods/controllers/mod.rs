pub mod goods_controller;
