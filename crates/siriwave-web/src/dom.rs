use anyhow::anyhow;
use crate::css::container_length;
use siriwave_core::{Geometry, HostMetrics, WaveOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `devicePixelRatio`, or 1 when the host reports nothing useful.
#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}

/// Pixel ratio and CSS size of `container`. Sizes given in `options` win and
/// skip the computed-style lookup.
pub fn host_metrics(
    container: &web::HtmlElement,
    options: &WaveOptions,
) -> anyhow::Result<HostMetrics> {
    let pixel_ratio = device_pixel_ratio();
    if let (Some(width), Some(height)) = (options.width, options.height) {
        return Ok(HostMetrics {
            pixel_ratio,
            width,
            height,
        });
    }

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let style = window
        .get_computed_style(container)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("container has no computed style"))?;
    let read = |prop: &str, explicit: Option<f64>| -> anyhow::Result<f64> {
        if let Some(v) = explicit {
            return Ok(v);
        }
        let raw = style.get_property_value(prop).map_err(|e| anyhow!("{:?}", e))?;
        Ok(container_length(prop, &raw))
    };
    Ok(HostMetrics {
        pixel_ratio,
        width: read("width", options.width)?,
        height: read("height", options.height)?,
    })
}

/// Create a canvas sized for `geometry` and append it to `container`.
pub fn attach_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
    geometry: &Geometry,
    ratio: f64,
    cover: bool,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_width(geometry.width as u32);
    canvas.set_height(geometry.height as u32);

    let style = canvas.style();
    let (css_w, css_h) = if cover {
        ("100%".to_string(), "100%".to_string())
    } else {
        (
            format!("{}px", geometry.width / ratio),
            format!("{}px", geometry.height / ratio),
        )
    };
    style
        .set_property("width", &css_w)
        .map_err(|e| anyhow!("{:?}", e))?;
    style
        .set_property("height", &css_h)
        .map_err(|e| anyhow!("{:?}", e))?;

    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}
