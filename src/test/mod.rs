mod report;
mod routing_table;
