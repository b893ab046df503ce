use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PaymentOutcome;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub order_id: String,
    #[schema(example = "COD_3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub transaction_id: String,
    #[schema(example = "PENDING")]
    pub status: String,
    pub amount: f64,
    #[schema(example = "COD")]
    pub payment_method: String,
    pub payment_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<PaymentOutcome> for PaymentResponse {
    fn from(value: PaymentOutcome) -> Self {
        let PaymentOutcome { payment, message } = value;
        Self {
            order_id: payment.order_id.to_string(),
            transaction_id: payment.transaction_id,
            status: payment.status.as_str().to_owned(),
            amount: payment.amount,
            payment_method: payment.method.as_str().to_owned(),
            payment_date: payment.payment_date,
            message: Some(message.to_owned()),
        }
    }
}
