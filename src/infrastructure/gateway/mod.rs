pub mod convert;

use crate::domain::models::GatewayBox;

pub struct GatewayManager {}

impl GatewayManager {
    pub fn get() -> GatewayBox {
        return Box::<convert::Convert>::default();
    }
}
