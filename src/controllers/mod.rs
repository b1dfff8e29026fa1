pub mod rental_controller;
