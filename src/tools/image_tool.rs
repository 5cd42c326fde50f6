use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender};
use log::{info, warn};

use super::{Tool, subscribe_interactions};
use crate::element::{DEFAULT_IMAGE_POSITION, factory};
use crate::event::EditorEvent;
use crate::id_generator::ElementId;
use crate::loader::{
    CompletionSender, DecodeCompletion, DecodeTicket, ImageLoader, completion_channel,
};
use crate::state::SceneContext;

/// Places decoded images on the canvas and removes them last-in, first-out
pub struct ImageTool {
    loader: Box<dyn ImageLoader>,
    /// Placed images, bottom to top
    images: Vec<ElementId>,
    in_flight: Vec<DecodeTicket>,
    next_ticket: u64,
    sender: UnboundedSender<DecodeCompletion>,
    receiver: UnboundedReceiver<DecodeCompletion>,
}

impl std::fmt::Debug for ImageTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageTool")
            .field("images", &self.images)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl ImageTool {
    pub fn new(loader: Box<dyn ImageLoader>) -> Self {
        let (sender, receiver) = completion_channel();
        Self {
            loader,
            images: Vec::new(),
            in_flight: Vec::new(),
            next_ticket: 1,
            sender,
            receiver,
        }
    }

    /// Placed images, bottom to top
    pub fn images(&self) -> &[ElementId] {
        &self.images
    }

    /// Decodes that have been requested but not completed yet
    pub fn pending_decodes(&self) -> &[DecodeTicket] {
        &self.in_flight
    }

    /// Starts loading `url`. The image is placed later, once its decode completes.
    pub fn add_image(&mut self, url: impl Into<String>) -> DecodeTicket {
        let ticket = DecodeTicket {
            id: self.next_ticket,
            url: url.into(),
        };
        self.next_ticket += 1;

        info!("Requesting image {} (ticket {})", ticket.url, ticket.id);
        self.in_flight.push(ticket.clone());
        self.loader
            .begin(CompletionSender::new(ticket.clone(), self.sender.clone()));
        ticket
    }

    /// Places every decode that finished since the last poll, in the order they finished.
    /// Returns the ids of the images placed.
    pub fn poll_completions(&mut self, ctx: &mut SceneContext<'_>) -> Vec<ElementId> {
        let mut placed = Vec::new();
        while let Ok(Some(completion)) = self.receiver.try_next() {
            if let Some(id) = self.apply_completion(ctx, completion) {
                placed.push(id);
            }
        }
        placed
    }

    fn apply_completion(
        &mut self,
        ctx: &mut SceneContext<'_>,
        completion: DecodeCompletion,
    ) -> Option<ElementId> {
        let DecodeCompletion { ticket, result } = completion;
        self.in_flight.retain(|t| t.id != ticket.id);

        match result {
            Ok(decoded) => {
                let mut element =
                    factory::create_image(ticket.url.clone(), decoded, DEFAULT_IMAGE_POSITION);
                subscribe_interactions(&mut element);
                let id = ctx.place(element);
                self.images.push(id);
                ctx.surface.commit();
                info!("Added image {} from {}", id, ticket.url);
                Some(id)
            }
            Err(err) => {
                warn!("Image {} was not added: {}", ticket.url, err);
                ctx.events.emit(EditorEvent::ResourceLoadFailed {
                    url: ticket.url,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    /// Forgets every placed image and outstanding decode without touching the surface.
    /// Decodes that finish afterwards are never polled.
    pub fn clear(&mut self) {
        self.images.clear();
        self.in_flight.clear();
    }

    /// Removes the most recently placed image. Does nothing when there are none.
    pub fn remove_last_image(&mut self, ctx: &mut SceneContext<'_>) -> Option<ElementId> {
        let id = self.images.pop()?;
        ctx.destroy(id);
        ctx.surface.commit();
        info!("Removed image {}", id);
        Some(id)
    }
}

impl Tool for ImageTool {
    fn name(&self) -> &'static str {
        "Image"
    }

    fn owned_elements(&self) -> Vec<ElementId> {
        self.images.clone()
    }
}
