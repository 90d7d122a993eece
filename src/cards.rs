use crate::constants::{CARD_SELECTOR, WORK_GRID_ID};
use crate::{dom, reveal};
use anyhow::anyhow;
use folio_core::{Mounted, Project, RevealCard, RevealParams, PROJECTS};
use wasm_bindgen::JsCast;
use web_sys as web;

fn render_card(
    document: &web::Document,
    project: &Project,
    index: usize,
) -> anyhow::Result<web::Element> {
    let class = RevealCard::new(index).class_name();
    let card = dom::create_element(document, "article", &class, None)?;

    let top = dom::create_element(document, "div", "cardTop", None)?;
    dom::append(&top, &dom::create_element(document, "div", "cardDot", None)?)?;
    dom::append(
        &top,
        &dom::create_element(document, "h4", "cardTitle", Some(project.title))?,
    )?;
    dom::append(&card, &top)?;

    dom::append(
        &card,
        &dom::create_element(document, "p", "cardDesc", Some(project.description))?,
    )?;

    let tags = dom::create_element(document, "div", "cardTags", None)?;
    for tag in project.tags {
        dom::append(&tags, &dom::create_element(document, "span", "tag", Some(*tag))?)?;
    }
    dom::append(&card, &tags)?;
    Ok(card)
}

/// Fill `#work-grid` with project cards (unless the markup already has them)
/// and attach a reveal observer to each card in order.
pub fn mount(document: &web::Document, params: &RevealParams) -> anyhow::Result<Option<Mounted>> {
    let Some(grid) = document.get_element_by_id(WORK_GRID_ID) else {
        log::debug!("[cards] #{} not found, skipping", WORK_GRID_ID);
        return Ok(None);
    };

    if grid.child_element_count() == 0 {
        for (i, project) in PROJECTS.iter().enumerate() {
            dom::append(&grid, &render_card(document, project, i)?)?;
        }
    }

    let cards = grid
        .query_selector_all(CARD_SELECTOR)
        .map_err(|e| anyhow!("query {}: {:?}", CARD_SELECTOR, e))?;
    let mut mounted = Mounted::new("reveal");
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        mounted.push(reveal::observe(&card, i as usize, params)?);
    }
    log::info!("[cards] observing {} cards", mounted.len());
    Ok(Some(mounted))
}
