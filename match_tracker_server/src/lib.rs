//! # Match Tracker server
//! This crate hosts the HTTP server for the match tracker. It is responsible for:
//! Parsing request paths and JSON bodies.
//! Handing each request to the Match Repository or the Event Ledger in [`match_tracker_engine`].
//! Mapping the outcome to a JSON response and an HTTP status code.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `GET /api/matches`: All matches, with per-team goal and card tallies.
//! * `GET /api/matches/{id}`: One match with its tallies and every goal and card.
//! * `POST /api/matches`: Create a match.
//! * `PUT /api/matches/{id}`: Overwrite the teams and date of a match.
//! * `DELETE /api/matches/{id}`: Delete a match.
//! * `PATCH /api/matches/{id}/goals`, `/yellow_cards`, `/red_cards`: Register an event.
//! * `PATCH /api/matches/{id}/extratime`: Set the extra time of a match.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod helpers;
pub mod routes;
pub mod server;
