use carepath_core::models::questionnaire::QuestionnaireId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(#[from] carepath_core::error::CoreError),

    #[error("questionnaire {0} is not registered in the catalog")]
    Unregistered(QuestionnaireId),

    #[error("unknown item '{link_id}' for questionnaire '{questionnaire}'")]
    UnknownItem {
        questionnaire: QuestionnaireId,
        link_id: String,
    },
}
