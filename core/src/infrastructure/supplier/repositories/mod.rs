pub mod supplier_repository;
