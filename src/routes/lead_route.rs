use actix_web::{post, web, HttpResponse};

use crate::{domain::lead::Lead, services::LeadGateway};

#[post("")]
async fn submit_lead(gateway: web::Data<LeadGateway>, body: web::Json<Lead>) -> HttpResponse {
    match gateway.submit(&body).await {
        Ok(()) => HttpResponse::Ok().body("Lead received"),
        Err(e) => {
            log::error!("Lead submission failed: {:?}", e);
            HttpResponse::BadGateway().body("Could not submit your request. Please try again.")
        }
    }
}
