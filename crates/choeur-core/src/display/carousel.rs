//! Markdown rendering of the carousel and its controls.

use std::fmt;

use crate::{
    carousel::{
        indicator_label, Carousel, CarouselHost, CarouselState, PlayState, SlideList, NEXT_LABEL,
        PREVIOUS_LABEL, REGION_LABEL,
    },
    error::CarouselError,
};

/// Snapshot of a carousel for display.
///
/// Renders the current slide, its position, the indicator dots and the
/// labelled controls:
///
/// ```text
/// # Carrousel d'images du chœur
///
/// **2/6** Concert du CPMB en novembre 2023
/// `/carrousel/CPMB-novembre 2023.jpg`
///
/// ○ ● ○ ○ ○ ○
///
/// [Image précédente] [Mettre en pause] [Image suivante]
/// ```
pub struct CarouselView<'a> {
    slides: &'a SlideList,
    state: CarouselState,
    autoplay_error: Option<&'a CarouselError>,
}

impl<'a> CarouselView<'a> {
    pub fn new<H: CarouselHost>(carousel: &'a Carousel<H>) -> Self {
        Self {
            slides: carousel.slides(),
            state: carousel.state(),
            autoplay_error: carousel.autoplay_error(),
        }
    }

    /// Accessible labels of the indicator buttons, the current one marked.
    pub fn indicators(&self) -> Vec<(String, bool)> {
        (0..self.slides.len())
            .map(|i| (indicator_label(i), i == self.state.current_index))
            .collect()
    }
}

impl<'a> fmt::Display for CarouselView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {REGION_LABEL}")?;
        writeln!(f)?;

        if let Some(slide) = self.slides.get(self.state.current_index) {
            writeln!(
                f,
                "**{}/{}** {}",
                self.state.current_index + 1,
                self.slides.len(),
                slide.alt_text
            )?;
            writeln!(f, "`{}`", slide.source)?;
            writeln!(f)?;
        }

        let dots: Vec<&str> = self
            .indicators()
            .iter()
            .map(|(_, current)| if *current { "●" } else { "○" })
            .collect();
        writeln!(f, "{}", dots.join(" "))?;
        writeln!(f)?;

        writeln!(
            f,
            "[{PREVIOUS_LABEL}] [{}] [{NEXT_LABEL}]",
            self.state.play_state.toggle_label()
        )?;
        let status = match self.state.play_state {
            PlayState::Playing => "Défilement automatique",
            PlayState::Paused => "En pause",
        };
        writeln!(f, "*{status}*")?;

        if let Some(e) = self.autoplay_error {
            writeln!(f)?;
            writeln!(f, "Lecture automatique indisponible: {e}")?;
        }
        Ok(())
    }
}
