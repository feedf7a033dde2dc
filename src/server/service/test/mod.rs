mod auth;
mod company;
mod game;
mod user;
