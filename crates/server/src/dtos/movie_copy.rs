use database::{entities::movie_copies, repository::set_if};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieCopyResponse {
    pub id: i32,
    pub movie_id: i32,
    pub code: Option<String>,
}

impl From<movie_copies::Model> for MovieCopyResponse {
    fn from(copy: movie_copies::Model) -> Self {
        Self {
            id: copy.id,
            movie_id: copy.movie_id,
            code: copy.code,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieCopyCreate {
    pub movie_id: i32,
    pub code: Option<String>,
}

impl From<MovieCopyCreate> for movie_copies::ActiveModel {
    fn from(copy: MovieCopyCreate) -> Self {
        Self {
            id: NotSet,
            movie_id: Set(copy.movie_id),
            code: Set(copy.code),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MovieCopyUpdate {
    pub movie_id: Option<i32>,
    /// `null` clears the code, omitting the field keeps it
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<String>)]
    pub code: Option<Option<String>>,
}

impl From<MovieCopyUpdate> for movie_copies::ActiveModel {
    fn from(copy: MovieCopyUpdate) -> Self {
        Self {
            id: NotSet,
            movie_id: set_if(copy.movie_id),
            code: set_if(copy.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> MovieCopyUpdate {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_code_null_and_missing_differ() {
        assert_eq!(parse(r#"{}"#).code, None);
        assert_eq!(parse(r#"{"code": null}"#).code, Some(None));
        assert_eq!(parse(r#"{"code": "B-7"}"#).code, Some(Some("B-7".to_owned())));
    }

    #[test]
    fn test_null_code_is_written() {
        let model = movie_copies::ActiveModel::from(parse(r#"{"code": null}"#));
        assert_eq!(model.code, Set(None));
        assert_eq!(model.movie_id, NotSet);
    }
}
