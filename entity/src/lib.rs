pub mod message;
pub mod user;

/*
 A user is created on registration and never deleted.
 Messages point at two users (sender and recipient) through foreign keys on
 username, so the store refuses a message whose parties don't exist.
 */
