//! GraphQL document, request body and response decoding.

use rickdex_core::{CharacterPage, RequestDescriptor, ResultRecord};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Characters query. Every filter field is always sent; an empty string
/// means "no filter on this field".
pub const CHARACTERS_QUERY: &str = r#"query Characters($page: Int, $filter: FilterCharacter) {
  characters(page: $page, filter: $filter) {
    info {
      pages
    }
    results {
      id
      name
      image
      species
      status
      gender
      origin {
        name
      }
      location {
        name
      }
    }
  }
}"#;

/// JSON body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,

    pub variables: CharactersVariables,
}

/// Variables of [`CHARACTERS_QUERY`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharactersVariables {
    pub page: u32,

    pub filter: CharacterFilter,
}

/// `FilterCharacter` input object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterFilter {
    pub name: String,

    pub species: String,

    pub status: String,

    pub gender: String,
}

impl GraphQlRequest {
    /// Build the characters request for a descriptor.
    pub fn characters(request: &RequestDescriptor) -> Self {
        Self {
            query: CHARACTERS_QUERY,
            variables: CharactersVariables {
                page: request.page,
                filter: CharacterFilter {
                    name: request.name_query.clone(),
                    species: request.species.clone(),
                    status: request.status.clone(),
                    gender: request.gender.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,

    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CharactersData {
    characters: Option<Characters>,
}

#[derive(Debug, Deserialize)]
struct Characters {
    info: Option<Info>,

    results: Option<Vec<Character>>,
}

#[derive(Debug, Deserialize)]
struct Info {
    pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Character {
    id: Option<String>,
    name: Option<String>,
    image: Option<String>,
    species: Option<String>,
    status: Option<String>,
    gender: Option<String>,
    origin: Option<Place>,
    location: Option<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: Option<String>,
}

impl Place {
    fn into_name(place: Option<Place>) -> String {
        place.and_then(|p| p.name).unwrap_or_default()
    }
}

impl From<Character> for ResultRecord {
    fn from(c: Character) -> Self {
        ResultRecord {
            id: c.id.unwrap_or_default(),
            name: c.name.unwrap_or_default(),
            image: c.image.unwrap_or_default(),
            species: c.species.unwrap_or_default(),
            status: c.status.unwrap_or_default(),
            gender: c.gender.unwrap_or_default(),
            origin_name: Place::into_name(c.origin),
            location_name: Place::into_name(c.location),
        }
    }
}

/// Decode a GraphQL response body into a page of characters.
///
/// The first GraphQL error wins over any partial data. A missing
/// `characters` field decodes to an empty page.
pub fn decode_response(body: &str) -> Result<CharacterPage> {
    let response: GraphQlResponse<CharactersData> =
        serde_json::from_str(body).map_err(|e| ClientError::decode(e.to_string()))?;

    if let Some(error) = response.errors.into_iter().next() {
        return Err(ClientError::GraphQl(error.message));
    }

    let data = response
        .data
        .ok_or_else(|| ClientError::decode("response has neither data nor errors"))?;

    let Some(characters) = data.characters else {
        return Ok(CharacterPage::default());
    };

    let total_pages = characters.info.and_then(|i| i.pages).unwrap_or(0);
    let results = characters
        .results
        .unwrap_or_default()
        .into_iter()
        .map(ResultRecord::from)
        .collect();

    Ok(CharacterPage::new(total_pages, results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_serialization() {
        let request = RequestDescriptor {
            page: 3,
            name_query: "rick".to_string(),
            species: "Human".to_string(),
            status: String::new(),
            gender: String::new(),
        };

        let body = serde_json::to_value(GraphQlRequest::characters(&request)).unwrap();

        assert_eq!(body["variables"]["page"], 3);
        assert_eq!(body["variables"]["filter"]["name"], "rick");
        assert_eq!(body["variables"]["filter"]["species"], "Human");
        assert_eq!(body["variables"]["filter"]["status"], "");
        assert_eq!(body["variables"]["filter"]["gender"], "");
        assert!(body["query"].as_str().unwrap().contains("characters(page: $page"));
    }

    #[test]
    fn test_decode_populated_response() {
        let body = r#"{
            "data": {
                "characters": {
                    "info": { "pages": 42 },
                    "results": [
                        {
                            "id": "1",
                            "name": "Rick Sanchez",
                            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                            "species": "Human",
                            "status": "Alive",
                            "gender": "Male",
                            "origin": { "name": "Earth (C-137)" },
                            "location": { "name": "Citadel of Ricks" }
                        }
                    ]
                }
            }
        }"#;

        let page = decode_response(body).unwrap();

        assert_eq!(page.total_pages, 42);
        assert_eq!(page.results.len(), 1);
        let rick = &page.results[0];
        assert_eq!(rick.id, "1");
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.origin_name, "Earth (C-137)");
        assert_eq!(rick.location_name, "Citadel of Ricks");
    }

    #[test]
    fn test_decode_tolerates_null_fields() {
        let body = r#"{
            "data": {
                "characters": {
                    "info": { "pages": null },
                    "results": [
                        { "id": "7", "name": "Abradolf Lincler", "image": null,
                          "species": null, "status": null, "gender": null,
                          "origin": null, "location": { "name": null } }
                    ]
                }
            }
        }"#;

        let page = decode_response(body).unwrap();

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.results[0].name, "Abradolf Lincler");
        assert_eq!(page.results[0].origin_name, "");
        assert_eq!(page.results[0].location_name, "");
    }

    #[test]
    fn test_decode_null_characters_is_empty_page() {
        let page = decode_response(r#"{ "data": { "characters": null } }"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_decode_graphql_error() {
        let body = r#"{
            "errors": [{ "message": "404: Not Found" }],
            "data": { "characters": null }
        }"#;

        let err = decode_response(body).unwrap_err();
        assert_eq!(err, ClientError::GraphQl("404: Not Found".to_string()));
        assert_eq!(err.to_string(), "404: Not Found");
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_response("<html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
