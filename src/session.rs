// ABOUTME: Editing session owning the mutable deck and the selected slide
// ABOUTME: Slide-level operations: add, delete, duplicate, update, reorder, select

use crate::errors::{Result, SliderError};
use crate::model::{ButtonVariant, Slide, SlideButton, SliderConfig, SliderData};
use log::{debug, info};

const NEW_SLIDE_IMAGE: &str = "https://images.unsplash.com/photo-1557683316-973673baf926?w=400";

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// One editing session: a deck plus the slide currently being edited
#[derive(Debug, Clone)]
pub struct EditorSession {
    data: SliderData,
    current: usize,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SliderData::default())
    }
}

impl EditorSession {
    pub fn new(data: SliderData) -> Self {
        Self { data, current: 0 }
    }

    pub fn data(&self) -> &SliderData {
        &self.data
    }

    /// Immutable copy handed to the bundle generator
    pub fn snapshot(&self) -> SliderData {
        self.data.clone()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.data.slides.get(self.current)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.slides.len() {
            return Err(SliderError::SlideIndexOutOfRange {
                index,
                len: self.data.slides.len(),
            });
        }
        Ok(())
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.current = index;
        Ok(())
    }

    pub fn slide_mut(&mut self, index: usize) -> Result<&mut Slide> {
        self.check_index(index)?;
        Ok(&mut self.data.slides[index])
    }

    /// Append a template slide and select it. Returns the new slide's index.
    pub fn add_slide(&mut self) -> usize {
        let id = new_id();
        let slide = Slide {
            id: id.clone(),
            title: vec!["New Slide".to_string()],
            subtitle: vec!["Add your content here".to_string()],
            image_url: NEW_SLIDE_IMAGE.to_string(),
            buttons: vec![SlideButton {
                id: format!("{}-1", id),
                text: "CLICK ME".to_string(),
                url: "#".to_string(),
                variant: ButtonVariant::Primary,
            }],
            alignment: None,
        };
        self.data.slides.push(slide);
        self.current = self.data.slides.len() - 1;
        info!("Slide added at index {}", self.current);
        self.current
    }

    /// Remove a slide. The last remaining slide can never be deleted.
    pub fn delete_slide(&mut self, index: usize) -> Result<Slide> {
        if self.data.slides.len() <= 1 {
            return Err(SliderError::LastSlide);
        }
        self.check_index(index)?;
        let removed = self.data.slides.remove(index);
        if self.current >= self.data.slides.len() {
            self.current = self.data.slides.len() - 1;
        }
        info!("Slide {:?} deleted", removed.id);
        Ok(removed)
    }

    /// Copy a slide with fresh ids, insert it after the source and select it.
    pub fn duplicate_slide(&mut self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        let mut copy = self.data.slides[index].clone();
        copy.id = new_id();
        for btn in &mut copy.buttons {
            btn.id = format!("{}-{}", copy.id, btn.id);
        }
        self.data.slides.insert(index + 1, copy);
        self.current = index + 1;
        info!("Slide {} duplicated", index);
        Ok(self.current)
    }

    /// Replace the slide with the same id
    pub fn update_slide(&mut self, slide: Slide) -> Result<()> {
        let pos = self
            .data
            .slides
            .iter()
            .position(|s| s.id == slide.id)
            .ok_or_else(|| {
                SliderError::ValidationError(format!("no slide with id {:?}", slide.id))
            })?;
        self.data.slides[pos] = slide;
        Ok(())
    }

    /// Reorder a slide; the selection follows the slide that was selected.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let selected_id = self.data.slides[self.current].id.clone();
        let slide = self.data.slides.remove(from);
        self.data.slides.insert(to, slide);
        if let Some(pos) = self.data.slides.iter().position(|s| s.id == selected_id) {
            self.current = pos;
        }
        debug!("Moved slide {} -> {}", from, to);
        Ok(())
    }

    pub fn set_config(&mut self, config: SliderConfig) {
        self.data.config = config;
    }

    pub fn into_data(self) -> SliderData {
        self.data
    }
}
