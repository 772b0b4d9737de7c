use crate::domain::InquiryCategory;
use actix_web::HttpResponse;

#[derive(serde::Serialize)]
struct CategoryOption {
    value: &'static str,
    label: &'static str,
}

pub async fn list_categories() -> HttpResponse {
    let options: Vec<CategoryOption> = InquiryCategory::ALL
        .iter()
        .map(|c| CategoryOption {
            value: c.value(),
            label: c.label(),
        })
        .collect();
    HttpResponse::Ok().json(options)
}
