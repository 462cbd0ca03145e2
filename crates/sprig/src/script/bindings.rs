use std::cell::RefCell;

use mlua::{AnyUserData, Lua, MetaMethod, UserData, UserDataMethods, Value, Variadic};
use scoped_tls::scoped_thread_local;
use sprig_geom::Vec2;

use crate::{
    color::Color,
    element::Arg,
    error::{Error, Result},
    registry::{ElementId, EngineId, UiEngine},
};

/// Registry lent to scripts for the duration of one execution.
struct BoundUi<'a> {
    /// The borrowed registry. The cell rejects re-entrant access.
    ui: RefCell<&'a mut UiEngine>,
}

scoped_thread_local!(static BOUND_UI: *const ());

/// Run `f` with `ui` reachable from the `ui` table and element handles.
pub(super) fn with_bound<R>(ui: &mut UiEngine, f: impl FnOnce() -> R) -> R {
    let bound = BoundUi {
        ui: RefCell::new(ui),
    };
    let ptr = &bound as *const BoundUi<'_> as *const ();
    BOUND_UI.set(&ptr, f)
}

/// Run `f` against the bound registry.
fn with_ui<R>(f: impl FnOnce(&mut UiEngine) -> Result<R>) -> mlua::Result<R> {
    if !BOUND_UI.is_set() {
        return Err(mlua::Error::runtime(
            "no UI engine is bound to this execution",
        ));
    }
    BOUND_UI.with(|ptr| {
        // SAFETY: `ptr` was created from a pointer to `BoundUi` in
        // `with_bound`, which outlives every call made while it is set.
        let bound = unsafe { &*(*ptr as *const BoundUi<'_>) };
        let mut ui = bound
            .ui
            .try_borrow_mut()
            .map_err(|_| mlua::Error::runtime("UI engine is already in use"))?;
        f(&mut ui).map_err(mlua::Error::external)
    })
}

/// A script-side reference to an element.
///
/// Handles are bound to the engine that issued them. They stay valid Lua
/// values after their element is destroyed, or when a later execution binds
/// a different engine; using them then raises an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHandle {
    /// The referenced element.
    pub id: ElementId,
    /// The engine that owns `id`.
    engine: EngineId,
}

impl ElementHandle {
    /// A handle to `id` in `ui`.
    pub fn new(ui: &UiEngine, id: ElementId) -> Self {
        Self {
            id,
            engine: ui.engine_id(),
        }
    }

    /// The element id, if this handle was issued by `ui`.
    fn resolve(&self, ui: &UiEngine) -> Result<ElementId> {
        if self.engine == ui.engine_id() {
            Ok(self.id)
        } else {
            Err(Error::InvalidArgument(format!(
                "handle to {:?} belongs to another UI engine",
                self.id
            )))
        }
    }
}

/// Copy a handle out of a userdata argument.
fn handle_arg(ud: &AnyUserData) -> mlua::Result<ElementHandle> {
    Ok(*ud.borrow::<ElementHandle>()?)
}

/// Run `f` against the bound registry and the element behind `handle`.
fn with_element<R>(
    handle: &ElementHandle,
    f: impl FnOnce(&mut UiEngine, ElementId) -> Result<R>,
) -> mlua::Result<R> {
    with_ui(|ui| {
        let id = handle.resolve(ui)?;
        f(ui, id)
    })
}

/// Wrap ids from `ui` as handles.
fn handles(ui: &UiEngine, ids: &[ElementId]) -> Vec<ElementHandle> {
    ids.iter().map(|id| ElementHandle::new(ui, *id)).collect()
}

/// Convert loosely typed script values into construction arguments.
fn to_args(values: &Variadic<Value>) -> mlua::Result<Vec<Arg>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Integer(n) => Ok(Arg::Int(*n)),
            Value::Number(n) => Ok(Arg::Float(*n)),
            Value::Boolean(b) => Ok(Arg::Bool(*b)),
            Value::String(s) => Ok(Arg::Str(s.to_str()?.to_string())),
            other => Err(mlua::Error::external(Error::InvalidArgument(format!(
                "argument {}: unsupported type {}",
                i + 1,
                other.type_name()
            )))),
        })
        .collect()
}

/// Parse a color argument.
fn color_arg(s: &str) -> mlua::Result<Color> {
    Color::parse(s).map_err(mlua::Error::external)
}

impl UserData for ElementHandle {
    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let tag = with_element(this, |ui, id| Ok(ui.element(id)?.tag()))
                .map_or_else(|_| "Element".to_string(), |t| t.to_string());
            Ok(format!("{tag}{:?}", this.id))
        });
        methods.add_meta_method(MetaMethod::Eq, |_, this, other: AnyUserData| {
            Ok(handle_arg(&other)? == *this)
        });

        methods.add_method("tag", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.tag().name()))
        });
        methods.add_method("name", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.attrs.name.clone()))
        });
        methods.add_method("set_name", |_, this, name: String| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.name = name;
                Ok(())
            })
        });

        methods.add_method("position", |_, this, ()| {
            with_element(this, |ui, id| {
                let p = ui.element(id)?.attrs.transform.position;
                Ok((p.x, p.y))
            })
        });
        methods.add_method("set_position", |_, this, (x, y): (f32, f32)| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.transform.position = Vec2::new(x, y);
                Ok(())
            })
        });
        methods.add_method("size", |_, this, ()| {
            with_element(this, |ui, id| {
                let s = ui.element(id)?.attrs.size;
                Ok((s.x, s.y))
            })
        });
        methods.add_method("set_size", |_, this, (w, h): (f32, f32)| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.size = Vec2::new(w, h);
                Ok(())
            })
        });
        methods.add_method("rotation", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.attrs.transform.rotation_degrees()))
        });
        methods.add_method("set_rotation", |_, this, degrees: f32| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?
                    .attrs
                    .transform
                    .set_rotation_degrees(degrees);
                Ok(())
            })
        });
        methods.add_method("set_scale", |_, this, (sx, sy): (f32, Option<f32>)| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.transform.scale = Vec2::new(sx, sy.unwrap_or(sx));
                Ok(())
            })
        });

        methods.add_method("visible", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.attrs.visible))
        });
        methods.add_method("set_visible", |_, this, v: bool| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.visible = v;
                Ok(())
            })
        });
        methods.add_method("active", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.attrs.active))
        });
        methods.add_method("set_active", |_, this, v: bool| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.active = v;
                Ok(())
            })
        });
        methods.add_method("z_index", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.attrs.z_index))
        });
        methods.add_method("set_z_index", |_, this, z: i32| {
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.z_index = z;
                Ok(())
            })
        });

        methods.add_method("set_color", |_, this, color: String| {
            let color = color_arg(&color)?;
            with_element(this, |ui, id| {
                ui.element_mut(id)?.attrs.background_color = color;
                Ok(())
            })
        });
        methods.add_method(
            "set_border",
            |_, this, (size, color): (i32, Option<String>)| {
                let color = color.as_deref().map(color_arg).transpose()?;
                with_element(this, |ui, id| {
                    let attrs = &mut ui.element_mut(id)?.attrs;
                    attrs.border_size_pixel = size.max(0);
                    if let Some(color) = color {
                        attrs.border_color = color;
                    }
                    Ok(())
                })
            },
        );
        methods.add_method(
            "set_transparency",
            |_, this, (whole, background): (i32, Option<i32>)| {
                with_element(this, |ui, id| {
                    let attrs = &mut ui.element_mut(id)?.attrs;
                    attrs.set_transparency(whole);
                    if let Some(bg) = background {
                        attrs.set_background_transparency(bg);
                    }
                    Ok(())
                })
            },
        );

        methods.add_method("text", |_, this, ()| {
            with_element(this, |ui, id| Ok(ui.element(id)?.text().map(str::to_string)))
        });
        methods.add_method("set_text", |_, this, text: String| {
            with_element(this, |ui, id| ui.element_mut(id)?.set_text(text))
        });

        methods.add_method("add_child", |_, this, child: AnyUserData| {
            let child = handle_arg(&child)?;
            with_element(this, |ui, id| {
                let child = child.resolve(ui)?;
                ui.add_child(id, child)
            })
        });
        methods.add_method("parent", |_, this, ()| {
            with_element(this, |ui, id| {
                Ok(ui.element(id)?.parent().map(|p| ElementHandle::new(ui, p)))
            })
        });
        methods.add_method("children", |_, this, ()| {
            with_element(this, |ui, id| Ok(handles(ui, ui.element(id)?.children())))
        });
        methods.add_method("detach", |_, this, ()| with_element(this, |ui, id| ui.detach(id)));
        methods.add_method("destroy", |_, this, ()| with_element(this, |ui, id| ui.destroy(id)));
    }
}

/// Install the global `ui` table.
pub(super) fn register(lua: &Lua) -> mlua::Result<()> {
    let ui = lua.create_table()?;

    ui.set(
        "new",
        lua.create_function(|_, (tag, args): (String, Variadic<Value>)| {
            let args = to_args(&args)?;
            with_ui(|ui| {
                let id = ui.spawn_named(&tag, &args)?;
                Ok(id.map(|id| ElementHandle::new(ui, id)))
            })
        })?,
    )?;
    ui.set(
        "construct",
        lua.create_function(|_, (handle, args): (AnyUserData, Variadic<Value>)| {
            let handle = handle_arg(&handle)?;
            let args = to_args(&args)?;
            with_element(&handle, |ui, id| ui.construct(id, &args))
        })?,
    )?;
    ui.set(
        "add",
        lua.create_function(|_, handle: AnyUserData| {
            let handle = handle_arg(&handle)?;
            with_element(&handle, |ui, id| ui.add_element(id))
        })?,
    )?;
    ui.set(
        "find",
        lua.create_function(|_, name: String| {
            with_ui(|ui| Ok(ui.find_by_name(&name).map(|id| ElementHandle::new(ui, id))))
        })?,
    )?;
    ui.set(
        "roots",
        lua.create_function(|_, ()| {
            with_ui(|ui| Ok(handles(ui, ui.roots())))
        })?,
    )?;
    ui.set(
        "redraw",
        lua.create_function(|_, ()| {
            with_ui(|ui| {
                ui.request_redraw();
                Ok(())
            })
        })?,
    )?;
    ui.set(
        "rgb",
        lua.create_function(|_, (r, g, b, a): (u8, u8, u8, Option<u8>)| {
            Ok(Color::rgba(r, g, b, a.unwrap_or(255)).to_string())
        })?,
    )?;

    lua.globals().set("ui", ui)
}
