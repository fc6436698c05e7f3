use axum::body::Bytes;
use axum::extract::{Path as ReqPath, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::data::*;
use crate::html;
use crate::AppState;

pub mod api;
pub mod files;
pub mod pages;
