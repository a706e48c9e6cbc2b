use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "A1 Site API",
        version = "0.3.0",
        description = "Section plans and lead capture for the A1 recruitment site."
    ),
    paths(
        crate::routes::page_plan,
        crate::routes::create_lead,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::PagePlanResponse,
        crate::dto::SectionPlanResponse,
        crate::dto::LeadRequest,
        crate::dto::LeadResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "pages", description = "Dispatched CMS page structure"),
        (name = "leads", description = "Lead capture"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
