use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, lead_route, preview_route},
    services::{LeadGateway, PreviewEventSender, PreviewStateReceiver},
};

pub fn run(
    listener: TcpListener,
    lead_gateway: LeadGateway,
    event_sender: PreviewEventSender,
    state_receiver: PreviewStateReceiver,
) -> Result<Server, std::io::Error> {
    let lead_gateway = web::Data::new(lead_gateway);
    let event_sender = web::Data::new(event_sender);
    let state_receiver = web::Data::new(state_receiver);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(
                web::scope("/preview")
                    .service(preview_route::state)
                    .service(preview_route::query)
                    .service(preview_route::target),
            )
            .service(web::scope("/lead").service(lead_route::submit_lead))
            .app_data(lead_gateway.clone())
            .app_data(event_sender.clone())
            .app_data(state_receiver.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
