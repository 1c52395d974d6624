//! Request handler definitions
//!
//! Define each route and it handler here. Handlers stay thin: they unpack the request, call the Match Repository or
//! the Event Ledger, and turn the result into a response. Any real logic belongs in `match_tracker_engine`.
//!
//! Every handler is async and every backend call is awaited, so a slow database query never blocks a worker thread.
use actix_web::{get, options, web, HttpResponse, Responder};
use log::*;
use match_tracker_engine::{
    db_types::{EventKind, ExtraTimeUpdate, NewMatch, NewMatchEvent},
    EventLedgerApi,
    MatchRepositoryApi,
    MatchTrackerDatabase,
};

use crate::{data_objects::JsonResponse, errors::ServerError};

pub const EXTRA_TIME_UPDATED: &str = "Extra time updated successfully";

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Preflight  ----------------------------------------------------
/// Browsers send an `OPTIONS` request before cross-origin writes. The CORS headers are added to every response, so
/// all that is left to do here is say yes.
#[options("/matches{tail:.*}")]
pub async fn preflight() -> impl Responder {
    trace!("💻️ Received preflight request");
    HttpResponse::Ok().finish()
}

// ----------------------------------------------   Matches  ----------------------------------------------------
route!(list_matches => Get "/matches" impl MatchTrackerDatabase);
/// Lists every match along with the number of goals, yellow cards and red cards each team has.
pub async fn list_matches<B: MatchTrackerDatabase>(
    api: web::Data<MatchRepositoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received list matches request");
    let matches = api.list().await?;
    Ok(HttpResponse::Ok().json(matches))
}

route!(get_match => Get "/matches/{id}" impl MatchTrackerDatabase);
/// Fetches a single match with its tallies and the full list of goals and cards.
pub async fn get_match<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    api: web::Data<MatchRepositoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    trace!("💻️ Received get match request for #{id}");
    let result = api.get(id).await?;
    Ok(HttpResponse::Ok().json(result))
}

route!(create_match => Post "/matches" impl MatchTrackerDatabase);
pub async fn create_match<B: MatchTrackerDatabase>(
    body: web::Json<NewMatch>,
    api: web::Data<MatchRepositoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received create match request: {body:?}");
    let record = api.create(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

route!(update_match => Put "/matches/{id}" impl MatchTrackerDatabase);
/// Overwrites the teams and the date of a match.
///
/// The id is not checked. Updating a match that does not exist returns the submitted values under the requested id.
pub async fn update_match<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    body: web::Json<NewMatch>,
    api: web::Data<MatchRepositoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    trace!("💻️ Received update request for match #{id}: {body:?}");
    let record = api.update(id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

route!(delete_match => Delete "/matches/{id}" impl MatchTrackerDatabase);
pub async fn delete_match<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    api: web::Data<MatchRepositoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    trace!("💻️ Received delete request for match #{id}");
    api.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

route!(set_extra_time => Patch "/matches/{id}/extratime" impl MatchTrackerDatabase);
pub async fn set_extra_time<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    body: web::Json<ExtraTimeUpdate>,
    api: web::Data<MatchRepositoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    trace!("💻️ Received extra time update for match #{id}: {body:?}");
    api.set_extra_time(id, &body.extra_time).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::new(EXTRA_TIME_UPDATED)))
}

// ----------------------------------------------   Events  ----------------------------------------------------
route!(register_goal => Patch "/matches/{id}/goals" impl MatchTrackerDatabase);
pub async fn register_goal<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    body: web::Json<NewMatchEvent>,
    api: web::Data<EventLedgerApi<B>>,
) -> Result<HttpResponse, ServerError> {
    register_event(EventKind::Goal, path.into_inner(), body.into_inner(), &api).await
}

route!(register_yellow_card => Patch "/matches/{id}/yellow_cards" impl MatchTrackerDatabase);
pub async fn register_yellow_card<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    body: web::Json<NewMatchEvent>,
    api: web::Data<EventLedgerApi<B>>,
) -> Result<HttpResponse, ServerError> {
    register_event(EventKind::YellowCard, path.into_inner(), body.into_inner(), &api).await
}

route!(register_red_card => Patch "/matches/{id}/red_cards" impl MatchTrackerDatabase);
pub async fn register_red_card<B: MatchTrackerDatabase>(
    path: web::Path<i64>,
    body: web::Json<NewMatchEvent>,
    api: web::Data<EventLedgerApi<B>>,
) -> Result<HttpResponse, ServerError> {
    register_event(EventKind::RedCard, path.into_inner(), body.into_inner(), &api).await
}

async fn register_event<B: MatchTrackerDatabase>(
    kind: EventKind,
    id: i64,
    event: NewMatchEvent,
    api: &EventLedgerApi<B>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received {kind} for match #{id}: {event:?}");
    api.register_event(id, kind, event).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::new(kind.confirmation())))
}
