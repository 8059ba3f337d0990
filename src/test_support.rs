//! Fixtures shared by unit tests: generated QR images and upstream payloads

use image::{GrayImage, ImageFormat, Luma};
use serde_json::{Value, json};
use std::io::Cursor;

const MODULE_PX: u32 = 8;
const QUIET_ZONE: u32 = 4;

fn encode_png(img: &GrayImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode fixture png");
    out.into_inner()
}

/// PNG with a single QR symbol carrying `payload`
pub fn qr_png(payload: &str) -> Vec<u8> {
    let code = qrcode::QrCode::new(payload.as_bytes()).expect("encode qr fixture");
    let width = code.width() as u32;
    let colors = code.to_colors();
    let side = (width + 2 * QUIET_ZONE) * MODULE_PX;

    let img = GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / MODULE_PX, y / MODULE_PX);
        let inside = (QUIET_ZONE..QUIET_ZONE + width).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + width).contains(&my);
        let dark = inside
            && colors[((my - QUIET_ZONE) * width + (mx - QUIET_ZONE)) as usize]
                == qrcode::Color::Dark;
        Luma([if dark { 0 } else { 255 }])
    });
    encode_png(&img)
}

/// Plain white PNG with nothing to detect
pub fn blank_png() -> Vec<u8> {
    encode_png(&GrayImage::from_pixel(120, 120, Luma([255])))
}

/// Timeline node with a caption and no carousel
pub fn post_node(id: &str, caption: &str) -> Value {
    json!({
        "id": id,
        "shortcode": format!("sc{}", id),
        "__typename": "GraphImage",
        "display_url": format!("https://cdn.example/{}.jpg", id),
        "thumbnail_src": format!("https://cdn.example/{}_thumb.jpg", id),
        "is_video": false,
        "taken_at_timestamp": 1_700_000_000,
        "edge_media_to_caption": { "edges": [ { "node": { "text": caption } } ] },
        "edge_media_preview_like": { "count": 12 },
        "edge_media_to_comment": { "count": 3 }
    })
}

/// Carousel node whose children display the given image URLs, in order
pub fn carousel_node(id: &str, caption: &str, child_urls: &[String]) -> Value {
    let mut node = post_node(id, caption);
    node["__typename"] = json!("GraphSidecar");
    let children: Vec<Value> = child_urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            json!({ "node": {
                "id": format!("{}_{}", id, i),
                "is_video": false,
                "display_url": url,
                "thumbnail_src": null
            } })
        })
        .collect();
    node["edge_sidecar_to_children"] = json!({ "edges": children });
    node
}

fn timeline(nodes: Vec<Value>) -> Value {
    let edges: Vec<Value> = nodes.into_iter().map(|node| json!({ "node": node })).collect();
    json!({ "user": { "edge_owner_to_timeline_media": { "edges": edges } } })
}

/// Body shaped like the profile page endpoint
pub fn web_profile_body(nodes: Vec<Value>) -> Value {
    json!({ "graphql": timeline(nodes) })
}

/// Body shaped like the web_profile_info API
pub fn profile_info_body(nodes: Vec<Value>) -> Value {
    json!({ "data": timeline(nodes), "status": "ok" })
}
