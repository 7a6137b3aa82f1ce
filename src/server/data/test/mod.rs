mod comment;
mod league;
mod match_event;
mod matches;
mod media;
mod news_article;
mod page;
mod season;
mod setting;
mod user;
