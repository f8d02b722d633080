use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::services::{Point, PreviewEvent, PreviewEventSender, PreviewStateReceiver};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryBody {
    company_name: String,
}

#[get("/state")]
async fn state(state_receiver: web::Data<PreviewStateReceiver>) -> HttpResponse {
    let current = state_receiver.receiver.borrow().clone();
    HttpResponse::Ok().json(current)
}

#[post("/query")]
async fn query(
    event_sender: web::Data<PreviewEventSender>,
    body: web::Json<QueryBody>,
) -> HttpResponse {
    let event = PreviewEvent::QueryChanged(body.into_inner().company_name);
    match event_sender.sender.send(event) {
        Ok(()) => HttpResponse::Accepted().finish(),
        Err(e) => {
            log::error!("Preview engine is gone: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/target")]
async fn target(
    event_sender: web::Data<PreviewEventSender>,
    body: web::Json<Point>,
) -> HttpResponse {
    match event_sender.sender.send(PreviewEvent::TargetMoved(*body)) {
        Ok(()) => HttpResponse::Accepted().finish(),
        Err(e) => {
            log::error!("Preview engine is gone: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
