mod coach;
mod team;
