use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::coupons::{CouponView, CreateCouponForm, UpdateCouponForm};
use crate::repository::DieselRepository;
use crate::routes::ApiResponse;
use crate::services::ServiceError;
use crate::services::coupons::{
    create_coupon, get_coupon, list_coupons, remove_coupon, update_coupon,
};

fn internal_error(err: impl std::fmt::Display) -> HttpResponse {
    log::error!("Coupon request failed: {err}");
    HttpResponse::InternalServerError().json(ApiResponse::failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error.",
    ))
}

#[get("/api/coupon")]
pub async fn show_coupons(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_coupons(repo.get_ref()) {
        Ok(coupons) => {
            let views: Vec<CouponView> = coupons.into_iter().map(CouponView::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(StatusCode::OK, Some(views)))
        }
        Err(err) => internal_error(err),
    }
}

#[get("/api/coupon/{id}")]
pub async fn show_coupon(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    // An unknown identifier is not an error: the envelope reports success
    // with a null result.
    match get_coupon(repo.get_ref(), path.into_inner()) {
        Ok(coupon) => {
            HttpResponse::Ok().json(ApiResponse::success(StatusCode::OK, coupon.map(CouponView::from)))
        }
        Err(err) => internal_error(err),
    }
}

#[post("/api/coupon")]
pub async fn add_coupon(
    body: web::Json<CreateCouponForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_coupon(repo.get_ref(), body.into_inner()) {
        Ok(coupon) => HttpResponse::Created().json(ApiResponse::success(
            StatusCode::CREATED,
            Some(CouponView::from(coupon)),
        )),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(ApiResponse::failure(StatusCode::BAD_REQUEST, message))
        }
        Err(ServiceError::Conflict) => HttpResponse::BadRequest().json(ApiResponse::failure(
            StatusCode::BAD_REQUEST,
            "Coupon name already exists",
        )),
        Err(err) => internal_error(err),
    }
}

#[put("/api/coupon")]
pub async fn edit_coupon(
    body: web::Json<UpdateCouponForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let form = body.into_inner();

    // The store write runs on the blocking pool so the event loop never
    // waits on it.
    let result = web::block(move || update_coupon(&repo, form)).await;

    match result {
        Ok(Ok(coupon)) => HttpResponse::Ok().json(ApiResponse::success(
            StatusCode::OK,
            Some(CouponView::from(coupon)),
        )),
        Ok(Err(ServiceError::Form(message))) => {
            HttpResponse::BadRequest().json(ApiResponse::failure(StatusCode::BAD_REQUEST, message))
        }
        Ok(Err(ServiceError::NotFound)) => HttpResponse::NotFound().json(ApiResponse::failure(
            StatusCode::NOT_FOUND,
            "Coupon not found.",
        )),
        Ok(Err(err)) => internal_error(err),
        Err(err) => internal_error(err),
    }
}

#[delete("/api/coupon/{id}")]
pub async fn delete_coupon(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_coupon(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success(StatusCode::OK, None)),
        Err(ServiceError::NotFound) => {
            HttpResponse::BadRequest().json(ApiResponse::failure(StatusCode::BAD_REQUEST, "InvalidId"))
        }
        Err(err) => internal_error(err),
    }
}
