//! CrudService: generic CRUD over a repository.

mod crud;
pub use crud::CrudService;
