use actix_web::HttpResponse;

#[tracing::instrument(
    "Checking if api is online"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().body("Working")
}

pub async fn home() -> HttpResponse{
    HttpResponse::Ok().body("Hello there, welcome and thanks for stopping by!")
}
