mod confirm_sign_up;
mod health;
mod me;
mod sign_in;
mod sign_up;
