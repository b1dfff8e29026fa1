pub mod api_response;
pub mod rental_dto;
