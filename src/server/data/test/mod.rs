mod reminder;
mod user;
