//! src/routes/waiting_list/get.rs

use actix_web::{web, HttpResponse};

use crate::error::{Error, HsResult};
use crate::routes::ApiResponse;
use crate::store::WaitingListStore;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingListStats {
    pub count: i64,
}

#[tracing::instrument(name = "Reading waiting list statistics.", skip(store))]
pub async fn waiting_list_stats(store: web::Data<dyn WaitingListStore>) -> HsResult<HttpResponse> {
    let count = store.count().await.map_err(Error::StatsError)?;
    Ok(HttpResponse::Ok().json(ApiResponse::data(WaitingListStats { count })))
}
