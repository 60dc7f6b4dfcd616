//! Surface construction.
//!
//! Wires one colored rectangle into the compositor: SHM-backed
//! wl_buffer, wl_surface, plus either a shell-surface role (toplevel)
//! or a subsurface role with an offset into the parent.

use std::os::fd::AsFd;

use wayland_client::protocol::{wl_buffer, wl_shell_surface, wl_shm, wl_subsurface, wl_surface};
use wayland_client::QueueHandle;

use crate::core::errors::Result;
use crate::core::session::{DemoApp, Globals};
use crate::core::shm::ShmBuffer;

/// The role a surface was registered with.
///
/// A rectangle is either a managed toplevel or a positioned subsurface
/// of exactly one parent, never both.
pub enum Role {
    /// Top-level window managed by wl_shell.
    Toplevel(wl_shell_surface::WlShellSurface),
    /// Child composited within its parent, offset from the parent's
    /// origin.
    Sub {
        subsurface: wl_subsurface::WlSubsurface,
        offset: (i32, i32),
    },
}

/// One colored rectangle registered with the compositor.
pub struct Surface {
    pub surface: wl_surface::WlSurface,
    pub buffer: wl_buffer::WlBuffer,
    pub role: Role,
    pub width: i32,
    pub height: i32,
    pub color: u32,
    /// Keeps the descriptor and mapping alive while the compositor may
    /// still read the pixels.
    pub shm: ShmBuffer,
}

impl Surface {
    /// Create, register and commit one rectangle.
    ///
    /// With a parent the rectangle becomes a desynchronized subsurface
    /// at `(x, y)` relative to the parent's origin; without one it
    /// becomes a toplevel shell surface and `(x, y)` is ignored.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        globals: &Globals,
        qh: &QueueHandle<DemoApp>,
        parent: Option<&Surface>,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        color: u32,
    ) -> Result<Self> {
        let shm = ShmBuffer::new(width, height, color)?;

        let pool = globals
            .shm
            .create_pool(shm.file().as_fd(), shm.len() as i32, qh, ());
        let buffer = pool.create_buffer(
            0,
            width,
            height,
            shm.stride(),
            wl_shm::Format::Argb8888,
            qh,
            (),
        );
        // The pool was only needed to carve out the one buffer.
        pool.destroy();

        let surface = globals.compositor.create_surface(qh, ());

        let role = match parent {
            Some(parent) => {
                let subsurface =
                    globals
                        .subcompositor
                        .get_subsurface(&surface, &parent.surface, qh, ());
                subsurface.set_position(x, y);
                subsurface.set_desync();
                tracing::info!("created {:#010x} subsurface at ({}, {})", color, x, y);
                Role::Sub {
                    subsurface,
                    offset: (x, y),
                }
            }
            None => {
                let shell_surface = globals.shell.get_shell_surface(&surface, qh, ());
                shell_surface.set_toplevel();
                tracing::info!("created {:#010x} toplevel", color);
                Role::Toplevel(shell_surface)
            }
        };

        surface.attach(Some(&buffer), 0, 0);
        surface.damage(0, 0, width, height);
        surface.commit();

        Ok(Self {
            surface,
            buffer,
            role,
            width,
            height,
            color,
            shm,
        })
    }

    /// Move this subsurface immediately below `sibling` in the parent's
    /// paint order. The compositor resolves the new order on the next
    /// parent commit. No-op for toplevels.
    pub fn place_below(&self, sibling: &wl_surface::WlSurface) {
        if let Role::Sub { subsurface, .. } = &self.role {
            subsurface.place_below(sibling);
        }
    }

    /// Flush pending surface state to the compositor.
    pub fn commit(&self) {
        self.surface.commit();
    }

    pub fn is_toplevel(&self) -> bool {
        matches!(self.role, Role::Toplevel(_))
    }

    /// Offset relative to the parent's origin, if this is a subsurface.
    pub fn offset(&self) -> Option<(i32, i32)> {
        match self.role {
            Role::Sub { offset, .. } => Some(offset),
            Role::Toplevel(_) => None,
        }
    }
}
