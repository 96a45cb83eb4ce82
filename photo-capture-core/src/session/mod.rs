pub mod photo_session;
