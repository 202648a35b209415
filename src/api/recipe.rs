//! Recipe Endpoints
//!
//! `GET/POST /recipes`, `PUT/DELETE /recipes/{id}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{request, HttpMethod, ResponseBody};
use crate::error::ApiError;
use crate::models::{Recipe, RecipeId, RecipePayload};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn recipe_path(id: &RecipeId) -> String {
    format!("/recipes/{}", utf8_percent_encode(&id.to_string(), PATH_SEGMENT))
}

/// Decode a `GET /recipes` body
pub fn decode_recipe_list(body: ResponseBody) -> Result<Vec<Recipe>, ApiError> {
    match body {
        ResponseBody::Json(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
        }
        ResponseBody::Text(_) => Err(ApiError::Decode("expected a JSON list of recipes".into())),
    }
}

pub async fn list_recipes() -> Result<Vec<Recipe>, ApiError> {
    let body = request(HttpMethod::Get, "/recipes", None, &[("Accept", "application/json")]).await?;
    decode_recipe_list(body)
}

/// The response body is ignored; callers re-fetch the list afterwards.
pub async fn create_recipe(payload: &RecipePayload) -> Result<(), ApiError> {
    let json = serde_json::to_string(payload)?;
    request(HttpMethod::Post, "/recipes", Some(json), &[]).await?;
    Ok(())
}

pub async fn update_recipe(id: &RecipeId, payload: &RecipePayload) -> Result<(), ApiError> {
    let json = serde_json::to_string(payload)?;
    request(HttpMethod::Put, &recipe_path(id), Some(json), &[]).await?;
    Ok(())
}

pub async fn delete_recipe(id: &RecipeId) -> Result<(), ApiError> {
    request(HttpMethod::Delete, &recipe_path(id), None, &[]).await?;
    Ok(())
}
