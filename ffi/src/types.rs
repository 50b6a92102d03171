//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use catalog_core::{Character, ListPage, TransportError};

/// Opaque handle to a `CatalogClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiCatalogClient {
    pub(crate) inner: catalog_core::CatalogClient,
}

/// Copy `s` into a heap C string owned by the caller. Interior NULs are
/// dropped rather than failing the whole conversion.
pub(crate) fn c_string(s: impl Into<String>) -> *mut c_char {
    let mut s: String = s.into();
    s.retain(|c| c != '\0');
    CString::new(s).unwrap_or_default().into_raw()
}

fn c_string_opt(s: Option<String>) -> *mut c_char {
    s.map(c_string).unwrap_or(std::ptr::null_mut())
}

/// Leak `items` as a raw array; null when empty.
fn into_raw_array<T>(items: Vec<T>) -> *mut T {
    if items.is_empty() {
        return std::ptr::null_mut();
    }
    let mut items = items.into_boxed_slice();
    let ptr = items.as_mut_ptr();
    std::mem::forget(items);
    ptr
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// A `GET` request described as C-compatible plain data.
///
/// Built by `catalog_build_*` functions. The C caller executes the request
/// and passes the response back through `catalog_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: catalog_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = into_raw_array(
            req.headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect(),
        );

        Box::into_raw(Box::new(FfiHttpRequest {
            url: c_string(req.url),
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing a request,
/// then passes a pointer to a `catalog_parse_*` function. The FFI layer
/// reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiCatalogResult`.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Decode = 3,
    Network = 4,
    InvalidArgument = 5,
    Panic = 6,
    NullArg = 7,
}

/// Tag that tells `catalog_free_result` what `FfiCatalogResult::data` points to.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    Character = 1,
    CharacterPage = 2,
}

/// A single character exposed to C.
#[repr(C)]
pub struct FfiCharacter {
    pub id: u32,
    pub name: *mut c_char,
    pub status: *mut c_char,
    pub species: *mut c_char,
    pub image_url: *mut c_char,
}

impl From<Character> for FfiCharacter {
    fn from(c: Character) -> Self {
        FfiCharacter {
            id: c.id,
            name: c_string(c.name),
            status: c_string(c.status),
            species: c_string(c.species),
            image_url: c_string(c.image_url),
        }
    }
}

/// One catalog page exposed to C. `next_url`/`prev_url` are null when
/// there is no such page.
#[repr(C)]
pub struct FfiCharacterPage {
    pub count: u32,
    pub total_pages: u32,
    pub next_url: *mut c_char,
    pub prev_url: *mut c_char,
    pub items: *mut FfiCharacter,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is the
/// text a UI should display, and `data` is null.
#[repr(C)]
pub struct FfiCatalogResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiCatalogResult {
    fn ok(data_tag: FfiDataTag, data: *mut std::ffi::c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiCatalogResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiCatalogResult {
            error_code,
            error_message: c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build a success result carrying a single `FfiCharacter`.
    pub(crate) fn ok_character(character: Character) -> *mut Self {
        let ffi = Box::new(FfiCharacter::from(character));
        Self::ok(FfiDataTag::Character, Box::into_raw(ffi) as *mut std::ffi::c_void)
    }

    /// Build a success result carrying an `FfiCharacterPage`.
    pub(crate) fn ok_page(page: ListPage) -> *mut Self {
        let len = page.items.len() as u32;
        let items = into_raw_array(page.items.into_iter().map(FfiCharacter::from).collect());
        let ffi = Box::new(FfiCharacterPage {
            count: page.info.count,
            total_pages: page.info.total_pages,
            next_url: c_string_opt(page.info.next_url),
            prev_url: c_string_opt(page.info.prev_url),
            items,
            len,
        });
        Self::ok(FfiDataTag::CharacterPage, Box::into_raw(ffi) as *mut std::ffi::c_void)
    }

    /// Build an error result from a `TransportError`.
    pub(crate) fn from_error(err: TransportError) -> *mut Self {
        let (error_code, http_status) = match &err {
            TransportError::NotFound { .. } => (FfiErrorCode::NotFound, 404u16),
            TransportError::HttpStatus { status, .. } => (FfiErrorCode::Http, *status),
            TransportError::Decode(_) => (FfiErrorCode::Decode, 0),
            TransportError::Network(_) => (FfiErrorCode::Network, 0),
            TransportError::InvalidArgument(_) => (FfiErrorCode::InvalidArgument, 0),
        };
        Self::err(error_code, http_status, catalog_core::error_message(&err))
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg.to_string())
    }
}
