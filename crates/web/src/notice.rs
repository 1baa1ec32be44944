use serde::Serialize;

use storefront_checkout::PaymentMethod;

/// Blocking message for the user (`alert` in the browser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    PaymentConfirmed { method: PaymentMethod },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::PaymentConfirmed { method } => {
                format!("Pagamento via {method} processado com sucesso! (Simulação)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_the_method() {
        let notice = Notice::PaymentConfirmed {
            method: PaymentMethod::Pix,
        };
        assert_eq!(notice.message(), "Pagamento via pix processado com sucesso! (Simulação)");
    }
}
