/*!
Native library boundary.

Everything cryptographic happens behind this module: the session types call
into the dispatch tables here, which marshal byte slices in and out of the
linked PQClean implementations. Each catalog also carries algorithm names the
binding recognizes but has no linked implementation for, so callers can
distinguish "unknown name" from "known but not enabled in this build".
*/

pub(crate) mod kem;
pub(crate) mod sig;
