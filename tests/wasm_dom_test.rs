//! Browser tests for DOM measurement
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use lyriq_syllables::layout::measure_container;
use lyriq_syllables::SyllableEngine;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str, style: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    element.set_attribute("style", style).unwrap();
    element.set_inner_html(html);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_measures_words_relative_to_container() {
    let element = mount(
        "<div>hello world</div><div>little table</div>",
        "position: absolute; top: 500px; font-size: 16px; line-height: 20px; width: 600px",
    );

    let block = measure_container(&element).unwrap();
    assert_eq!(block.words.len(), 4);
    assert!(block.words[0].top >= 0.0 && block.words[0].top < 20.0);
    assert!(block.words[2].top >= 20.0);
    assert_eq!(block.metrics.line_height, Some(20.0));
    assert_eq!(block.metrics.font_size, Some(16.0));

    element.remove();
}

#[wasm_bindgen_test]
fn test_soft_wrapped_text_splits_into_visual_lines() {
    let element = mount(
        "hello world hello world hello world",
        "font: 16px monospace; line-height: 20px; width: 12ch",
    );

    let block = measure_container(&element).unwrap();
    let score = SyllableEngine::new().score_rendered(&block).unwrap();
    assert!(score.lines.len() >= 3);
    assert_eq!(score.total, 9);

    element.remove();
}

#[wasm_bindgen_test]
fn test_empty_container_has_no_lines() {
    let element = mount("<div><br></div>", "font-size: 16px");

    let block = measure_container(&element).unwrap();
    assert!(block.words.is_empty());
    assert!(SyllableEngine::new().score_rendered(&block).is_none());

    element.remove();
}

#[wasm_bindgen_test]
fn test_word_split_by_inline_markup_is_one_word() {
    let element = mount(
        "so beau<b>tiful</b><div>next line</div>",
        "font-size: 16px; line-height: 20px; width: 600px",
    );

    let block = measure_container(&element).unwrap();
    assert!(block.words[2].joins_previous);
    // "next" starts a new block right after "tiful" but sits on the next row
    assert!(block.words[3].joins_previous);

    let score = SyllableEngine::new().score_rendered(&block).unwrap();
    let texts: Vec<&str> = score.lines.iter().map(|line| line.text.as_str()).collect();
    assert_eq!(texts, vec!["so beautiful", "next line"]);

    element.remove();
}
