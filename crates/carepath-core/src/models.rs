pub mod acuity;
pub mod assessment;
pub mod disposition;
pub mod patient;
pub mod questionnaire;
pub mod response;
