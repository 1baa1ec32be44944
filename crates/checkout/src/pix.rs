//! Pix "BR Code" payloads (EMV merchant-presented QR, tag-length-value).
//!
//! Layout, in order:
//!
//! ```text
//! 00 payload format indicator   "01"
//! 26 merchant account           00 "BR.GOV.BCB.PIX", 01 <key>
//! 52 merchant category code     "0000"
//! 53 currency                   "986" (BRL)
//! 54 amount                     cents digits, e.g. 42.00 -> "4200"
//! 58 country                    "BR"
//! 59 merchant name
//! 60 merchant city
//! 62 additional data            05 <txid>
//! 63 CRC16                      4 uppercase hex digits
//! ```

use crc::{CRC_16_IBM_3740, Crc};
use thiserror::Error;
use url::Url;

use storefront_core::Money;

pub const DEFAULT_PIX_KEY: &str = "suachavepix@exemplo.com";
pub const DEFAULT_MERCHANT_NAME: &str = "Impacto Cell";
pub const DEFAULT_MERCHANT_CITY: &str = "Novo Hamb";
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 200;

const PIX_GUI: &str = "BR.GOV.BCB.PIX";
const CURRENCY_BRL: &str = "986";
const COUNTRY_BR: &str = "BR";
const NO_CATEGORY: &str = "0000";
const MAX_FIELD_LEN: usize = 99;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PixError {
    #[error("field {tag} is {len} bytes; TLV values hold at most 99")]
    FieldTooLong { tag: &'static str, len: usize },
    #[error("invalid QR endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Static merchant data and the QR rendering endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixConfig {
    pub key: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub txid: String,
    pub qr_endpoint: String,
    pub qr_size: u32,
}

impl Default for PixConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_PIX_KEY.to_string(),
            merchant_name: DEFAULT_MERCHANT_NAME.to_string(),
            merchant_city: DEFAULT_MERCHANT_CITY.to_string(),
            txid: "***".to_string(),
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            qr_size: DEFAULT_QR_SIZE,
        }
    }
}

/// A generated Pix charge: payload plus the URL of its QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixCharge {
    amount: Money,
    key: String,
    payload: String,
    qr_url: Url,
}

impl PixCharge {
    /// Build the charge for `total`. A zero total yields `Ok(None)`: no QR is shown.
    pub fn generate(total: Money, config: &PixConfig) -> Result<Option<Self>, PixError> {
        if total.is_zero() {
            tracing::debug!("pix charge skipped: cart total is zero");
            return Ok(None);
        }

        let payload = build_payload(total, config)?;
        let size = format!("{0}x{0}", config.qr_size);
        let qr_url = Url::parse_with_params(
            &config.qr_endpoint,
            &[("size", size.as_str()), ("data", payload.as_str())],
        )?;

        Ok(Some(Self {
            amount: total,
            key: config.key.clone(),
            payload,
            qr_url,
        }))
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn qr_url(&self) -> &Url {
        &self.qr_url
    }
}

/// Assemble the TLV payload, CRC included.
pub fn build_payload(total: Money, config: &PixConfig) -> Result<String, PixError> {
    let merchant_account = [tlv("00", PIX_GUI)?, tlv("01", &config.key)?].concat();
    let additional_data = tlv("05", &config.txid)?;

    let mut payload = [
        tlv("00", "01")?,
        tlv("26", &merchant_account)?,
        tlv("52", NO_CATEGORY)?,
        tlv("53", CURRENCY_BRL)?,
        tlv("54", &total.digits())?,
        tlv("58", COUNTRY_BR)?,
        tlv("59", &config.merchant_name)?,
        tlv("60", &config.merchant_city)?,
        tlv("62", &additional_data)?,
    ]
    .concat();

    // The CRC covers its own tag and length.
    payload.push_str("6304");
    let crc = crc16_ccitt(payload.as_bytes());
    payload.push_str(&format!("{crc:04X}"));

    Ok(payload)
}

fn tlv(tag: &'static str, value: &str) -> Result<String, PixError> {
    let len = value.len();
    if len > MAX_FIELD_LEN {
        return Err(PixError::FieldTooLong { tag, len });
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// CRC-16/CCITT-FALSE (poly 0x1021, init 0xFFFF), catalogued as CRC-16/IBM-3740.
const CRC16_CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

pub fn crc16_ccitt(data: &[u8]) -> u16 {
    CRC16_CCITT_FALSE.checksum(data)
}
