//! Connection and registry bootstrap.
//!
//! Connects to the default Wayland display, enumerates the advertised
//! globals over a single blocking roundtrip and binds the four
//! capabilities the demo needs: wl_compositor, wl_subcompositor,
//! wl_shell and wl_shm, each at version 1. Everything else (including
//! global removals) is ignored.

use wayland_client::{
    protocol::{
        wl_buffer, wl_compositor, wl_registry, wl_shell, wl_shell_surface, wl_shm, wl_shm_pool,
        wl_subcompositor, wl_subsurface, wl_surface,
    },
    Connection, Dispatch, EventQueue, QueueHandle,
};

use crate::core::errors::{DemoError, Result};

/// Dispatch state for the demo client.
///
/// Collects registry binds during bootstrap and answers shell-surface
/// pings afterwards; the static demo expects no other events.
#[derive(Default)]
pub struct DemoApp {
    compositor: Option<wl_compositor::WlCompositor>,
    subcompositor: Option<wl_subcompositor::WlSubcompositor>,
    shell: Option<wl_shell::WlShell>,
    shm: Option<wl_shm::WlShm>,
}

impl DemoApp {
    /// Turn the accumulated binds into a verified set of handles,
    /// naming the first missing interface on failure.
    pub fn verify(&self) -> Result<Globals> {
        Ok(Globals {
            compositor: self
                .compositor
                .clone()
                .ok_or(DemoError::MissingGlobal("wl_compositor"))?,
            subcompositor: self
                .subcompositor
                .clone()
                .ok_or(DemoError::MissingGlobal("wl_subcompositor"))?,
            shell: self
                .shell
                .clone()
                .ok_or(DemoError::MissingGlobal("wl_shell"))?,
            shm: self.shm.clone().ok_or(DemoError::MissingGlobal("wl_shm"))?,
        })
    }
}

/// The four bound capability handles, verified present.
#[derive(Clone)]
pub struct Globals {
    pub compositor: wl_compositor::WlCompositor,
    pub subcompositor: wl_subcompositor::WlSubcompositor,
    pub shell: wl_shell::WlShell,
    pub shm: wl_shm::WlShm,
}

/// Live connection to the display server plus the bound globals.
///
/// Owns every downstream protocol object; dropping the session releases
/// the connection.
pub struct Session {
    pub conn: Connection,
    pub queue: EventQueue<DemoApp>,
    pub globals: Globals,
}

impl Session {
    /// Connect to the default display endpoint and bind the required
    /// globals.
    ///
    /// One blocking roundtrip. Fails if no server is reachable or if any
    /// of the four required interfaces is not advertised; the caller is
    /// expected to bail out before building any surface.
    pub fn connect() -> Result<(Self, DemoApp)> {
        let conn = Connection::connect_to_env()?;
        tracing::info!("connected to Wayland display");

        let mut queue = conn.new_event_queue();
        let qh = queue.handle();

        let display = conn.display();
        let _registry = display.get_registry(&qh, ());

        let mut app = DemoApp::default();
        queue.roundtrip(&mut app)?;

        let globals = app.verify()?;
        tracing::info!("bound wl_compositor, wl_subcompositor, wl_shell and wl_shm");

        Ok((
            Session {
                conn,
                queue,
                globals,
            },
            app,
        ))
    }
}

impl Dispatch<wl_registry::WlRegistry, ()> for DemoApp {
    fn event(
        state: &mut Self,
        registry: &wl_registry::WlRegistry,
        event: wl_registry::Event,
        _: &(),
        _: &Connection,
        qh: &QueueHandle<Self>,
    ) {
        // GlobalRemove is not expected during this short-lived demo and
        // is deliberately a no-op.
        if let wl_registry::Event::Global {
            name, interface, ..
        } = event
        {
            match &interface[..] {
                "wl_compositor" => {
                    tracing::debug!("binding {} (name={})", interface, name);
                    state.compositor = Some(registry.bind(name, 1, qh, ()));
                }
                "wl_subcompositor" => {
                    tracing::debug!("binding {} (name={})", interface, name);
                    state.subcompositor = Some(registry.bind(name, 1, qh, ()));
                }
                "wl_shell" => {
                    tracing::debug!("binding {} (name={})", interface, name);
                    state.shell = Some(registry.bind(name, 1, qh, ()));
                }
                "wl_shm" => {
                    tracing::debug!("binding {} (name={})", interface, name);
                    state.shm = Some(registry.bind(name, 1, qh, ()));
                }
                _ => {}
            }
        }
    }
}

impl Dispatch<wl_shell_surface::WlShellSurface, ()> for DemoApp {
    fn event(
        _: &mut Self,
        shell_surface: &wl_shell_surface::WlShellSurface,
        event: wl_shell_surface::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        if let wl_shell_surface::Event::Ping { serial } = event {
            shell_surface.pong(serial);
        }
    }
}

impl Dispatch<wl_compositor::WlCompositor, ()> for DemoApp { fn event(_: &mut Self, _: &wl_compositor::WlCompositor, _: wl_compositor::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_subcompositor::WlSubcompositor, ()> for DemoApp { fn event(_: &mut Self, _: &wl_subcompositor::WlSubcompositor, _: wl_subcompositor::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_shell::WlShell, ()> for DemoApp { fn event(_: &mut Self, _: &wl_shell::WlShell, _: wl_shell::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_shm::WlShm, ()> for DemoApp { fn event(_: &mut Self, _: &wl_shm::WlShm, _: wl_shm::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_shm_pool::WlShmPool, ()> for DemoApp { fn event(_: &mut Self, _: &wl_shm_pool::WlShmPool, _: wl_shm_pool::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_buffer::WlBuffer, ()> for DemoApp { fn event(_: &mut Self, _: &wl_buffer::WlBuffer, _: wl_buffer::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_surface::WlSurface, ()> for DemoApp { fn event(_: &mut Self, _: &wl_surface::WlSurface, _: wl_surface::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
impl Dispatch<wl_subsurface::WlSubsurface, ()> for DemoApp { fn event(_: &mut Self, _: &wl_subsurface::WlSubsurface, _: wl_subsurface::Event, _: &(), _: &Connection, _: &QueueHandle<Self>) {} }
