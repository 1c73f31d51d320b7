use log::info;
use rouille::{Request, Response, url::form_urlencoded};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    catalog::{Catalog, FEATURED_LIMIT, query::QuerySpec},
    config::HttpConfig,
    domain::{
        facet::{Facet, FacetKind, Genre, Mood},
        slug::encode_facet,
        track::Track,
    },
    http::error::ApiError,
};

/// JSON front end over an immutable [`Catalog`].
///
/// The catalog is never mutated after startup, so request handlers share it
/// without locking.
pub struct HttpServer {
    catalog: Arc<Catalog>,
    pub config: HttpConfig,
}

impl HttpServer {
    pub fn new(catalog: Catalog, config: HttpConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    pub fn run(self) {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        rouille::start_server(addr, move |request| self.handle_request(request));
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let response = rouille::router!(request,
            (GET) (/) => {
                self.handle_home()
            },
            (GET) (/songs) => {
                self.handle_listing(request)
            },
            (GET) (/songs/{slug: String}) => {
                self.handle_detail(&slug)
            },
            (GET) (/genre/{segment: String}) => {
                self.handle_facet_page(FacetKind::Genre, &segment)
            },
            (GET) (/mood/{segment: String}) => {
                self.handle_facet_page(FacetKind::Mood, &segment)
            },
            (GET) (/routes) => {
                Response::json(&self.catalog.all_routes())
            },
            _ => Response::empty_404()
        );

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.raw_url());
    }

    fn handle_home(&self) -> Response {
        Response::json(&HomeResponse {
            featured: self
                .catalog
                .featured(FEATURED_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            genres: FacetCount::all(self.catalog.genre_counts()),
            moods: FacetCount::all(self.catalog.mood_counts()),
        })
    }

    fn handle_listing(&self, request: &Request) -> Response {
        let spec = match listing_spec(request.raw_query_string()) {
            Ok(spec) => spec,
            Err(e) => return e.into_response(),
        };

        let tracks = self.catalog.listing(&spec);
        log::debug!(
            "LISTING q='{}' genres={} moods={} sort={} -> {} tracks",
            spec.search_text,
            spec.include_genres.len(),
            spec.include_moods.len(),
            spec.sort_order,
            tracks.len()
        );

        Response::json(&ListingResponse {
            total: self.catalog.tracks().len(),
            count: tracks.len(),
            tracks: tracks.into_iter().cloned().collect(),
        })
    }

    fn handle_detail(&self, slug: &str) -> Response {
        match self.catalog.detail(slug) {
            Ok(track) => Response::json(&TrackResponse::from_domain(track)),

            Err(e) => ApiError::from(e).into_response(),
        }
    }

    fn handle_facet_page(&self, kind: FacetKind, segment: &str) -> Response {
        Response::json(&self.catalog.facet_page(kind, segment))
    }
}

/// Builds the listing query from `q`, repeated `genre`/`mood` and `sort` params.
/// Facet values are display names, e.g. `genre=Lo-fi`.
fn listing_spec(raw_query: &str) -> Result<QuerySpec, ApiError> {
    let mut spec = QuerySpec::new();

    for (key, value) in form_urlencoded::parse(raw_query.as_bytes()) {
        match &*key {
            "q" => spec.search_text = value.into_owned(),
            "genre" => {
                let genre = Genre::from_name(&value)
                    .ok_or_else(|| ApiError::BadRequest(format!("unknown genre '{value}'")))?;
                spec.include_genres.insert(genre);
            }
            "mood" => {
                let mood = Mood::from_name(&value)
                    .ok_or_else(|| ApiError::BadRequest(format!("unknown mood '{value}'")))?;
                spec.include_moods.insert(mood);
            }
            "sort" => {
                spec.sort_order = value
                    .parse()
                    .map_err(|e: anyhow::Error| ApiError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    Ok(spec)
}

#[derive(Serialize, Deserialize)]
struct ListingResponse {
    total: usize,
    count: usize,
    tracks: Vec<Track>,
}

#[derive(Serialize, Deserialize)]
struct FacetCount {
    name: String,
    segment: String,
    count: usize,
}

impl FacetCount {
    fn all<F: Facet>(counts: Vec<(F, usize)>) -> Vec<Self> {
        counts
            .into_iter()
            .map(|(facet, count)| Self {
                name: facet.name().to_string(),
                segment: encode_facet(facet.name()),
                count,
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize)]
struct HomeResponse {
    featured: Vec<Track>,
    genres: Vec<FacetCount>,
    moods: Vec<FacetCount>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackResponse {
    #[serde(flatten)]
    track: Track,
    mood_tagline: String,
}

impl TrackResponse {
    fn from_domain(track: &Track) -> Self {
        Self {
            track: track.clone(),
            mood_tagline: track.mood.tagline().to_string(),
        }
    }
}

#[cfg(test)]
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: rouille::Response,
) -> anyhow::Result<T> {
    Ok(serde_json::from_reader(
        response.data.into_reader_and_size().0,
    )?)
}
