mod company;
mod game;
mod sale;
mod user;
