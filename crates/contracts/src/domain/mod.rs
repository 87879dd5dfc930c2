pub mod a001_vehicle_catalog;
