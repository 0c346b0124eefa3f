use crate::common::error::ErrorDetail;
use crate::modules::video::dto::*;
use crate::modules::video::model::{JobStatus, VideoResult};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Processing API",
        version = "1.0.0",
        description = "Submit videos for asynchronous processing and poll for results"
    ),
    paths(
        crate::modules::video::handler::submit_video,
        crate::modules::video::handler::get_video,
    ),
    components(
        schemas(
            SubmitVideoRequest, SubmitVideoResponse, VideoStatusResponse,
            JobStatus, VideoResult, ErrorDetail,
        )
    ),
    tags(
        (name = "Videos", description = "Asynchronous video processing")
    )
)]
pub struct ApiDoc;
