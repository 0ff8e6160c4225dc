mod basic_integration;
