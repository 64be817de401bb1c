pub mod credential_dto;
