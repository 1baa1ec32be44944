//! Markup rendering.
//!
//! Pure functions from domain values to HTML fragments. Text coming from the
//! catalog API (titles, descriptions, image URLs) is untrusted and always
//! escaped; prices and ratings are printed with two decimals.

use storefront_cart::CartLine;
use storefront_catalog::{CATALOG_LOADING_MESSAGE, Catalog, Product};
use storefront_checkout::PixCharge;
use storefront_core::Money;

pub const EMPTY_CART_MESSAGE: &str = "Seu carrinho está vazio.";
pub const BUY_LABEL: &str = "Comprar";
pub const ADDED_LABEL: &str = "Adicionado!";
pub const REMOVE_LABEL: &str = "Remover";

/// Class of the buy button inside each product card.
pub const BUY_BUTTON_CLASS: &str = "btn-comprar";
/// Class of the remove button inside each cart line.
pub const REMOVE_BUTTON_CLASS: &str = "btn-remover";

pub fn render_product(product: &Product) -> String {
    let title = escape_html(product.title());
    format!(
        r#"<div class="card">
    <img src="{thumb}" alt="{title}">
    <div class="card-content">
        <h2>{title}</h2>
        <p>{description}</p>
        <div class="price">Preço: R$ {price}</div>
        <div class="rating">Avaliação: {rating:.2}</div>
        <button class="{BUY_BUTTON_CLASS}" data-id="{id}">{BUY_LABEL}</button>
    </div>
</div>"#,
        thumb = escape_html(product.thumbnail()),
        description = escape_html(product.description()),
        price = product.price(),
        rating = product.rating(),
        id = product.id_typed(),
    )
}

pub fn render_catalog(catalog: &Catalog) -> String {
    catalog.iter().map(render_product).collect()
}

pub fn render_loading() -> String {
    format!("<p>{CATALOG_LOADING_MESSAGE}</p>")
}

pub fn render_catalog_error(message: &str) -> String {
    format!(r#"<p class="error">{}</p>"#, escape_html(message))
}

pub fn render_cart_line(line: &CartLine) -> String {
    let product = line.product();
    let title = escape_html(product.title());
    format!(
        r#"<div class="cart-item">
    <img src="{thumb}" alt="{title}">
    <div class="cart-item-info">
        <h4>{title}</h4>
        <p>Preço: R$ {price}</p>
        <p>Quantidade: {quantity}</p>
    </div>
    <button class="{REMOVE_BUTTON_CLASS}" data-id="{id}">{REMOVE_LABEL}</button>
</div>"#,
        thumb = escape_html(product.thumbnail()),
        price = line.unit_price(),
        quantity = line.quantity(),
        id = line.product_id(),
    )
}

pub fn render_empty_cart() -> String {
    format!("<p>{EMPTY_CART_MESSAGE}</p>")
}

pub fn render_cart(lines: &[CartLine]) -> String {
    if lines.is_empty() {
        return render_empty_cart();
    }
    lines.iter().map(render_cart_line).collect()
}

pub fn render_cart_total(total: Money) -> String {
    format!("R$ {total}")
}

pub fn render_pix_panel(charge: &PixCharge) -> String {
    format!(
        r#"<p class="text-center text-lg font-semibold mb-3">Escaneie o QR Code abaixo para pagar via Pix:</p>
<img src="{src}" alt="QR Code Pix" class="mx-auto rounded-lg shadow-md border" />
<p class="mt-3 text-sm text-gray-600">Valor: <strong>R$ {amount}</strong></p>
<p class="text-xs text-gray-400">Chave Pix: {key}</p>"#,
        src = escape_html(charge.qr_url().as_str()),
        amount = charge.amount(),
        key = escape_html(charge.key()),
    )
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
