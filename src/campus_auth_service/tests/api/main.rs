mod helpers;
mod login;
mod register;
mod verify_email;
mod verify_token;
